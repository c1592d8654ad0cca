//! Domain-level constants.
//!
//! Route paths and the plain-text messages returned to clients.

// =============================================================================
// Routes
// =============================================================================

/// Create (or overwrite) a user from the JSON body
pub const PATH_CREATE: &str = "/create";

/// Fetch a single user by `id` query parameter
pub const PATH_GET: &str = "/get";

/// Overwrite the user stored under the `id` query parameter
pub const PATH_UPDATE: &str = "/update";

/// Remove the user stored under the `id` query parameter
pub const PATH_DELETE: &str = "/delete";

/// List every stored user
pub const PATH_LIST: &str = "/list";

/// Query parameter carrying the user identifier
pub const ID_PARAM: &str = "id";

// =============================================================================
// Response messages
// =============================================================================

pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETED: &str = "User deleted successfully";

pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_ID_NOT_PROVIDED: &str = "User ID not provided";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_UNSUPPORTED_PATH: &str = "Unsupported path";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";

// =============================================================================
// Server
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;
