use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BecomeAttendantRequest {
    /// Id of the host to work for. Kept as sent; a malformed id is reported in
    /// the outcome.
    pub host_pk: Option<String>,
}
