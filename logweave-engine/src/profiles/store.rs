//! Profile store: built-in definitions merged with persisted user profiles.
//!
//! The collection is an explicit, caller-owned handle: the embedder loads it
//! once, passes it by reference into the engines, and decides when to
//! reload or re-persist. Concurrent mutation is the caller's to serialize;
//! the engines only ever borrow it immutably.

use std::path::Path;

use logweave_core::constants::DEFAULT_PROFILE_TITLE;
use logweave_core::errors::ProfileError;

use super::builtin;
use super::identity::generate_name;
use super::model::{Profile, ProfileOwner};
use super::persistence;

/// Embedded built-in convention definitions.
const BUILTIN_RESOURCE: &str = include_str!("../../resources/builtin_profiles.xml");

/// Ordered, sorted-by-title aggregate of all profiles.
#[derive(Debug, Clone)]
pub struct ProfileCollection {
    profiles: Vec<Profile>,
    name_changed: bool,
}

impl ProfileCollection {
    /// Load built-in definitions (embedded resource, hard-coded fallback)
    /// and merge user profiles from `user_store` if it exists.
    pub fn load(user_store: Option<&Path>) -> Result<Self, ProfileError> {
        Self::load_with_builtin_source(Some(BUILTIN_RESOURCE), user_store)
    }

    /// Like [`load`](Self::load) with an explicit built-in source. `None`
    /// or an unreadable resource falls back to the hard-coded conventions.
    pub fn load_with_builtin_source(
        resource: Option<&str>,
        user_store: Option<&Path>,
    ) -> Result<Self, ProfileError> {
        let builtins = match resource.map(persistence::read_profiles) {
            Some(Ok(profiles)) if !profiles.is_empty() => profiles,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "built-in profile resource unreadable, using hard-coded conventions");
                builtin::default_profiles()
            }
            _ => builtin::default_profiles(),
        };

        let mut collection = Self {
            profiles: Vec::new(),
            name_changed: false,
        };
        for profile in builtins {
            collection.insert_unique(profile);
        }

        if let Some(path) = user_store {
            if path.exists() {
                for mut profile in persistence::read_profiles_file(path)? {
                    // The user store only ever holds user profiles.
                    profile.owner = ProfileOwner::User;
                    collection.insert_unique(profile);
                }
            }
        }

        collection.sort();
        tracing::debug!(
            count = collection.len(),
            renamed = collection.name_changed,
            "profile collection loaded"
        );
        Ok(collection)
    }

    /// Serialize user profiles to `path`. Built-ins are never persisted.
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        tracing::debug!(path = %path.display(), "saving user profiles");
        persistence::write_profiles_file(path, self.profiles.iter().filter(|p| !p.is_builtin()))
    }

    /// Add a profile, enforcing name and title uniqueness. Returns the
    /// (possibly regenerated) identity name.
    pub fn add(&mut self, profile: Profile) -> String {
        let name = self.insert_unique(profile);
        self.sort();
        name
    }

    /// Remove a user profile. Refuses for built-ins.
    pub fn remove(&mut self, name: &str) -> Result<Profile, ProfileError> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| ProfileError::UnknownProfile { name: name.into() })?;
        if self.profiles[idx].is_builtin() {
            return Err(ProfileError::BuiltInImmutable {
                title: self.profiles[idx].title.clone(),
            });
        }
        Ok(self.profiles.remove(idx))
    }

    /// Clone a profile under a new title, with fresh identity and `User`
    /// ownership. Returns the clone's identity name.
    pub fn duplicate(&mut self, name: &str, new_title: &str) -> Result<String, ProfileError> {
        let source = self
            .by_name(name)
            .ok_or_else(|| ProfileError::UnknownProfile { name: name.into() })?;
        let mut clone = source.clone();
        clone.owner = ProfileOwner::User;
        clone.title = new_title.to_string();
        clone.name = generate_name(new_title, 0);
        Ok(self.add(clone))
    }

    /// Retitle a user profile. Refuses for built-ins and on title collision.
    pub fn rename(&mut self, name: &str, new_title: &str) -> Result<(), ProfileError> {
        if let Some(existing) = self.by_title(new_title) {
            if existing.name != name {
                return Err(ProfileError::DuplicateTitle {
                    title: new_title.to_string(),
                });
            }
        }
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| ProfileError::UnknownProfile { name: name.into() })?;
        if profile.is_builtin() {
            return Err(ProfileError::BuiltInImmutable {
                title: profile.title.clone(),
            });
        }
        profile.title = new_title.to_string();
        self.sort();
        Ok(())
    }

    pub fn by_name(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn by_title(&self, title: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.title == title)
    }

    pub fn first(&self) -> Option<&Profile> {
        self.profiles.first()
    }

    /// The built-in profile used as the session default, falling back to
    /// the first profile.
    pub fn default_profile(&self) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.is_builtin() && p.title == DEFAULT_PROFILE_TITLE)
            .or_else(|| self.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Whether a merge had to rename an incoming profile. The caller uses
    /// this to trigger an immediate re-persist.
    pub fn name_changed(&self) -> bool {
        self.name_changed
    }

    /// Read and reset the dirty flag.
    pub fn take_name_changed(&mut self) -> bool {
        std::mem::take(&mut self.name_changed)
    }

    fn insert_unique(&mut self, mut profile: Profile) -> String {
        if profile.name.is_empty() {
            profile.name = generate_name(&profile.title, 0);
        }
        let base_title = profile.title.clone();
        let mut counter = 1u64;
        while self.by_name(&profile.name).is_some() || self.by_title(&profile.title).is_some() {
            counter += 1;
            profile.title = format!("{base_title} ({counter})");
            profile.name = generate_name(&profile.title, counter);
            self.name_changed = true;
            tracing::debug!(title = profile.title.as_str(), "renamed colliding profile");
        }
        let name = profile.name.clone();
        self.profiles.push(profile);
        name
    }

    fn sort(&mut self) {
        self.profiles.sort_by(|a, b| a.title.cmp(&b.title));
    }
}
