// src/config/consts.rs

// Inputs
pub const DEFAULT_GEM_HTML: &str = "poe2db_gem.html";
pub const DEFAULT_GEM_IDS: &str = "gem_ids.json";

// Export
pub const DEFAULT_OUTPUT: &str = "public/poe2gems.json";

// Where the HTML snapshot comes from (fetched by the user, never by us)
pub const SOURCE_URL: &str = "https://poe2db.tw/us/Gem";

// Registry keys for support gems live in their own namespace
pub const SUPPORT_KEY_PREFIX: &str = "SUPPORT:";

// Section element ids on the gem page
pub const SKILL_SECTION_ID: &str = "SkillGemsGem";
pub const SUPPORT_SECTION_ID: &str = "SupportGemsGem";
pub const SPIRIT_SECTION_ID: &str = "SpiritGemsGem";

// Marker class on the tag container in the second cell
pub const TAGS_CLASS: &str = "gem_tags";
