/// User agent string used in HTTP requests to identify this client to the ICE server
pub const USER_AGENT: &str = "Rust-ICE-Client/0.1.0";
/// Path segment between the instance root and every endpoint
pub const REST_PREFIX: &str = "rest";
/// Header carrying the API token (token authentication)
pub const API_TOKEN_HEADER: &str = "X-ICE-API-Token";
/// Header carrying the API token client id (token authentication)
pub const API_TOKEN_CLIENT_HEADER: &str = "X-ICE-API-Token-Client";
/// Header carrying the session id obtained by logging in (password authentication)
pub const SESSION_ID_HEADER: &str = "X-ICE-Authentication-SessionId";
/// Endpoint exchanging an email and password for a session id
pub const LOGIN_ENDPOINT: &str = "accesstokens";
/// Number of entries pulled per request when walking a folder
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Container type at which sample locations stop by default
pub const DEFAULT_LOCATION_STOP: &str = "WELL";
/// Container type at which the locations recipe stops
pub const TUBE_LOCATION_STOP: &str = "TUBE";
/// Sequence format requested when fetching an entry record
pub const DEFAULT_SEQUENCE_FORMAT: &str = "genbank";
/// Width the first line of a GenBank record is padded to
pub const GENBANK_LOCUS_WIDTH: usize = 80;
/// Maximum number of suggestions attached to a failed name lookup
pub const SUGGESTION_LIMIT: usize = 5;
/// Minimum similarity score (0-100) for a name to be suggested
pub const SUGGESTION_MIN_SCORE: u8 = 50;
/// Number of hits requested when looking an entry up by name
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
/// Entry type sent when uploading a sequence file
pub const SEQUENCE_UPLOAD_ENTRY_TYPE: &str = "PART";
