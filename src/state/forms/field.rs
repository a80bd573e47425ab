//! Form field identifiers and their display metadata

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text typed by the user
    Text,
    /// Free text rendered masked unless revealed
    Secret,
    /// Value picked from a fixed list of options
    Select,
}

/// The ten registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneNumber,
    Country,
    City,
    PanNumber,
    AadharNumber,
}

impl FieldName {
    pub const COUNT: usize = 10;

    pub const ALL: [FieldName; Self::COUNT] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::PhoneNumber,
        Self::Country,
        Self::City,
        Self::PanNumber,
        Self::AadharNumber,
    ];

    /// Position of the field in display order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field at a display position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Key used when the values are serialized
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::PanNumber => "panNumber",
            Self::AadharNumber => "aadharNumber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::PanNumber => "PAN Number",
            Self::AadharNumber => "Aadhar Number",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Placeholder shown for an empty select field
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Country => Some("Select Country"),
            Self::City => Some("Select City"),
            _ => None,
        }
    }
}
