//! Profile model: a named bundle of settings for one logging convention.

use logweave_core::types::{FxHashMap, FxHashSet};

use crate::templates::keys;

/// Who owns a profile. Built-in profiles are never mutated or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOwner {
    BuiltIn,
    User,
}

impl ProfileOwner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuiltIn => "BuiltIn",
            Self::User => "User",
        }
    }
}

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl SettingValue {
    /// The type tag written to the persistence format.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "String",
            Self::Int(_) => "Integer",
            Self::Bool(_) => "Boolean",
            Self::List(_) => "List",
        }
    }
}

/// A named bundle of settings for one logging convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub owner: ProfileOwner,
    /// Identity key: UUID-shaped, globally unique, immutable.
    pub name: String,
    /// Human label, unique among profiles.
    pub title: String,
    /// Schema revision of this profile.
    pub version: u32,
    pub settings: FxHashMap<String, SettingValue>,
}

impl Profile {
    pub fn new(
        owner: ProfileOwner,
        name: impl Into<String>,
        title: impl Into<String>,
        version: u32,
    ) -> Self {
        Self {
            owner,
            name: name.into(),
            title: title.into(),
            version,
            settings: FxHashMap::default(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.owner == ProfileOwner::BuiltIn
    }

    pub fn set(&mut self, key: impl Into<String>, value: SettingValue) {
        self.settings.insert(key.into(), value);
    }

    pub fn set_str(&mut self, key: impl Into<String>, value: &str) {
        self.set(key, SettingValue::Str(value.to_string()));
    }

    pub fn set_list(&mut self, key: impl Into<String>, items: &[&str]) {
        self.set(
            key,
            SettingValue::List(items.iter().map(|s| s.to_string()).collect()),
        );
    }

    // ---- Typed accessors with safe fallbacks ----
    //
    // Missing or mis-typed values decode to the type-specific fallback
    // rather than raising; persisted profiles from older versions stay
    // usable.

    pub fn str_setting(&self, key: &str) -> &str {
        match self.settings.get(key) {
            Some(SettingValue::Str(s)) => s,
            _ => "",
        }
    }

    pub fn int_setting(&self, key: &str) -> i64 {
        match self.settings.get(key) {
            Some(SettingValue::Int(i)) => *i,
            _ => 0,
        }
    }

    pub fn bool_setting(&self, key: &str) -> bool {
        matches!(self.settings.get(key), Some(SettingValue::Bool(true)))
    }

    pub fn list_setting(&self, key: &str) -> &[String] {
        match self.settings.get(key) {
            Some(SettingValue::List(v)) => v.as_slice(),
            _ => &[],
        }
    }

    /// A statement template, present only when the key holds a string.
    /// Absence is how conventions express a smaller level/position set.
    pub fn template(&self, key: &str) -> Option<&str> {
        match self.settings.get(key) {
            Some(SettingValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The ordered level vocabulary of this convention.
    pub fn levels(&self) -> &[String] {
        self.list_setting(keys::LEVELS)
    }

    /// The log-call method name for a level (e.g. "debug", "fine").
    pub fn level_method(&self, level: &str) -> &str {
        self.str_setting(&keys::log_method_key(level))
    }

    /// Every method name a log call of this convention may carry. "log"
    /// covers the positional overloads of the JDK-style convention.
    pub fn level_method_names(&self) -> FxHashSet<String> {
        let mut names: FxHashSet<String> = self
            .levels()
            .iter()
            .map(|level| self.level_method(level).to_string())
            .filter(|m| !m.is_empty())
            .collect();
        names.insert("log".to_string());
        names
    }

    /// The package prefix whose imports identify this convention,
    /// derived from the logger type.
    pub fn import_prefix(&self) -> String {
        let logger_type = self.str_setting(keys::LOGGER_TYPE);
        match logger_type.rsplit_once('.') {
            Some((package, _)) => package.to_string(),
            None => logger_type.to_string(),
        }
    }
}
