//! Application layer use cases.
//!
//! - **`open_folders`** – Resolves a game folder through a [`FolderSource`]
//!   (the settings store), checks that it exists, and hands it to a
//!   [`FolderOpener`] (the OS file manager).  Both ports are traits so the
//!   use case can be exercised without touching the disk or spawning
//!   processes.
//!
//! [`FolderSource`]: open_folders::FolderSource
//! [`FolderOpener`]: open_folders::FolderOpener

pub mod open_folders;
