//! Domain layer: pure logic with no OS dependencies.
//!
//! - **`platform`** – which platform branch the process runs on, and the
//!   [`Environment`](platform::Environment) capability used to read
//!   environment variables and well-known directories.
//! - **`paths`** – where the game keeps its `images` and `Record` folders by
//!   default on each platform.
//! - **`settings`** – the two user-overridable folder paths persisted as JSON.

pub mod paths;
pub mod platform;
pub mod settings;
