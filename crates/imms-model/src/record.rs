//! Input row model.

/// Canonical, identifier-safe column names the pipeline binds to after
/// header sanitization (spaces replaced with underscores).
pub mod columns {
    pub const CLIENT_ID: &str = "Client_ID";
    pub const FIRST_NAME: &str = "First_Name";
    pub const LAST_NAME: &str = "Last_Name";
    pub const DATE_OF_BIRTH: &str = "Date_of_Birth";
    pub const STREET_ADDRESS: &str = "Street_Address";
    pub const CITY: &str = "City";
    pub const POSTAL_CODE: &str = "Postal_Code";
    pub const PROVINCE: &str = "Province";
    pub const SCHOOL: &str = "School";
    pub const VACCINES_DUE: &str = "Vaccines_Due";
    pub const RECEIVED_AGENTS: &str = "Received_Agents";
}

/// All canonical columns, in dataset order.
pub const CANONICAL_COLUMNS: &[&str] = &[
    columns::CLIENT_ID,
    columns::FIRST_NAME,
    columns::LAST_NAME,
    columns::DATE_OF_BIRTH,
    columns::STREET_ADDRESS,
    columns::CITY,
    columns::POSTAL_CODE,
    columns::PROVINCE,
    columns::SCHOOL,
    columns::VACCINES_DUE,
    columns::RECEIVED_AGENTS,
];

/// One validated dataset row. Ephemeral per pipeline run; rows sharing a
/// client identifier are merged downstream by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    /// Stable, unique client key.
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub province: String,
    /// Free-text school/site name, underscore-encoded upstream.
    pub school: String,
    /// Free-text comma-separated list of vaccines/diseases still owed.
    pub vaccines_due: String,
    /// Free-text log of `Mon D, YYYY - Name` fragments.
    pub received_agents: String,
}
