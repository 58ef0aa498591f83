//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum secret key length (security requirement)
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Cookie carrying the session token for browser clients
pub const AUTH_COOKIE_NAME: &str = "scoutme_token";

// =============================================================================
// User Roles
// =============================================================================

/// Athlete role
pub const ROLE_JUGADOR: &str = "jugador";

/// Talent scout role
pub const ROLE_OJEADOR: &str = "ojeador";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://scoutme.db?mode=rwc";

// =============================================================================
// Uploads
// =============================================================================

/// Default directory for uploaded video files
pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";

/// Default maximum request body size (100 MB)
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 104_857_600;

/// Video file extensions accepted for local uploads
pub const ALLOWED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mkv"];

// =============================================================================
// Outbound mail
// =============================================================================

/// Default SMTP submission port
pub const DEFAULT_MAIL_PORT: u16 = 587;

// =============================================================================
// Search API
// =============================================================================

/// Page number reported by the public search endpoint
pub const SEARCH_API_PAGE: u64 = 1;

/// Page size reported by the public search endpoint
pub const SEARCH_API_PER_PAGE: u64 = 20;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 6;
