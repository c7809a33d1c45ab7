//! Test fixtures - reusable content constants for tests.

/// Relative path of the mod metadata file
pub const MODINFO_PATH: &str = "modinfo.ini";

/// Relative path of the REFramework autorun script
pub const SCRIPT_PATH: &str = "reframework/autorun/better_hunter_highlights.lua";

/// Archive produced by a default build
pub const ARCHIVE_PATH: &str = "dist/Better-Hunter-Highlights.zip";

/// A typical modinfo.ini as shipped in the repository
pub const MODINFO: &str = "name=Better Hunter Highlights
version=0.0.0
description=Highlights hunters by status in the quest UI
author=modder
";

/// modinfo.ini without any `version=` line
pub const MODINFO_NO_VERSION: &str = "name=Better Hunter Highlights
description=No version here
";

/// A small autorun script
pub const SCRIPT: &str = r#"-- Better Hunter Highlights
local config = { enabled = true, color = 0xFF00FF00 }

re.on_frame(function()
    if not config.enabled then return end
end)
"#;
