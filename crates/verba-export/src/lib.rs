mod json;
mod script;

pub use json::to_json_pretty;
pub use script::ScriptTemplate;
