pub mod types;

/// Image shown for accounts that signed up without one.
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// Profile header used until the user picks their own.
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";
