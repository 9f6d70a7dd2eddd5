// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// External links
pub const GITHUB_URL: &str = "https://github.com/staehle/cdme";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "CDME: Cataclysm DDA Mod Editor";

pub const EN_BTN_OPEN_DIR: &str = "Open Mod Folder...";
pub const EN_BTN_OPEN_FILE: &str = "Open JSON File...";
pub const EN_BTN_SAVE_ALL: &str = "Save All";
pub const EN_BTN_SAVE_DIRTY: &str = "Save Dirty";
pub const EN_BTN_SAVE_FILE: &str = "Save File";
pub const EN_BTN_NEW_RECORD: &str = "New Record";
pub const EN_BTN_DELETE_RECORD: &str = "Delete Record";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_WINDOW_CONFIRM_DELETE: &str = "Delete Record";
pub const EN_WINDOW_CONFIRM_DISCARD: &str = "Unsaved Changes";

pub const EN_ABOUT_HEADING: &str = "CDME: Cataclysm DDA Mod Editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_PROJECT_REPO: &str = "GitHub Repo";

pub const EN_HOME_HEADING: &str = "CDME: Cataclysm DDA Mod Editor";
pub const EN_HOME_INSTRUCTIONS: &str = "Open a mod folder or a single data .json to begin.";

pub const EN_HEADING_KINDS: &str = "Record Types";
pub const EN_HEADING_RECORDS: &str = "Records";
pub const EN_HEADING_FIELDS: &str = "Fields";

pub const EN_SELECT_KIND: &str = "Select a record type.";
pub const EN_SELECT_RECORD: &str = "Select a record from the left.";

pub const EN_LABEL_ADD_FIELD: &str = "Add field:";
pub const EN_LABEL_CUSTOM_NAME: &str = "name";
pub const EN_LABEL_KIND: &str = "kind";
pub const EN_BTN_ADD: &str = "Add";
pub const EN_BTN_APPLY: &str = "Apply";
pub const EN_BTN_REMOVE: &str = "Remove";
pub const EN_BTN_YES_DELETE: &str = "Delete";
pub const EN_BTN_CANCEL: &str = "Cancel";
pub const EN_BTN_DISCARD: &str = "Discard and Open";

pub const EN_HINT_REF_ID: &str = "id";
pub const EN_HINT_CUSTOM_CHOICE: &str = "custom value";
pub const EN_PICK_DECLARED: &str = "— declared field —";

pub const EN_CONFIRM_DELETE_PROMPT: &str = "Delete this record from its file?";
pub const EN_CONFIRM_DISCARD_PROMPT: &str =
    "There are unsaved files. Opening another mod will discard those changes.";

pub const EN_BADGE_AUTO: &str = "auto";
pub const EN_HINT_AUTO_FIELD: &str =
    "Field present in the JSON but not declared by the schema; its kind was inferred from the value.";

pub const EN_STATUS_SAVED_ALL: &str = "All files saved.";
pub const EN_STATUS_NOTHING_DIRTY: &str = "No modified files.";

pub const EN_LABEL_FILES: &str = "files:";
pub const EN_LABEL_RECORDS: &str = "records:";
pub const EN_LABEL_DIRTY: &str = "dirty:";

pub const EN_PLACEHOLDER_UNNAMED: &str = "<unnamed>";
pub const EN_PLACEHOLDER_NO_PROJECT: &str = "<no project>";

// JSON keys with structural meaning in CDDA data (KEY_ prefix).
pub const KEY_TYPE: &str = "type";
pub const KEY_ID: &str = "id";
pub const KEY_IDENT: &str = "ident";
pub const KEY_ABSTRACT: &str = "abstract";
pub const KEY_STR: &str = "str";

// Fallback order when a schema's declared id field is absent (legacy content).
pub const ID_FALLBACKS: [&str; 3] = [KEY_ID, KEY_IDENT, KEY_ABSTRACT];

// Files created for records the editor itself adds, one per schema kind,
// so hand-authored files are never mutated by record creation.
pub const EDITOR_FILE_PREFIX: &str = "editor_";
pub const JSON_EXTENSION: &str = "json";
