//! Framework exchange: detect the logging convention a file uses and
//! rewrite its logger declaration and imports to a different convention.
//!
//! Three stable states, one per convention, and no partial state: detection
//! either names the current convention from the import statements or the
//! operation aborts. Conventions are assumed mutually exclusive per file.

use tree_sitter::Node;

use logweave_core::config::LogConfig;
use logweave_core::constants::CONVENTIONAL_LOGGER_NAMES;
use logweave_core::errors::ExchangeError;

use crate::adapter;
use crate::ops::context::{EditSet, Notice, OperationContext, SourceEdit};
use crate::ops::insert;
use crate::profiles::{Profile, ProfileCollection};
use crate::templates::{self, keys, Bindings};

pub struct ExchangeEngine<'a> {
    profiles: &'a ProfileCollection,
    config: &'a LogConfig,
}

impl<'a> ExchangeEngine<'a> {
    pub fn new(profiles: &'a ProfileCollection, config: &'a LogConfig) -> Self {
        Self { profiles, config }
    }

    /// The convention in use, determined by scanning import statements for
    /// each profile's characteristic package prefix. First matching import
    /// wins; built-ins take precedence over user clones sharing a prefix.
    pub fn detect(&self, root: Node, source: &str) -> Option<&'a Profile> {
        for import in adapter::imports(root) {
            let path = adapter::import_path(import, source);
            let candidates = self
                .profiles
                .iter()
                .filter(|p| p.is_builtin())
                .chain(self.profiles.iter().filter(|p| !p.is_builtin()));
            for profile in candidates {
                if path_matches_prefix(&path, &profile.import_prefix()) {
                    tracing::debug!(convention = profile.title.as_str(), "detected convention");
                    return Some(profile);
                }
            }
        }
        None
    }

    /// Rewrite the file from its current convention to `target`: remove
    /// the current convention's imports and re-render the logger field's
    /// declaration, preserving the variable name. Adding the target
    /// convention's imports is the caller's follow-up step (see
    /// [`import_edits`](Self::import_edits)).
    ///
    /// Only the first conventionally named logger field is converted;
    /// additional logger fields are left untouched.
    pub fn exchange(
        &self,
        ctx: &OperationContext,
        target: &Profile,
    ) -> Result<EditSet, ExchangeError> {
        let root = ctx.root();
        let current = self
            .detect(root, ctx.source)
            .ok_or(ExchangeError::DetectionFailed)?;
        if current.import_prefix() == target.import_prefix() {
            return Ok(EditSet::with_notice(Notice::ConventionUnchanged));
        }
        tracing::debug!(
            from = current.title.as_str(),
            to = target.title.as_str(),
            "exchanging logging convention"
        );

        let mut set = EditSet::default();
        let prefix = current.import_prefix();
        for import in adapter::imports(root) {
            if path_matches_prefix(&adapter::import_path(import, ctx.source), &prefix) {
                set.push_edit(insert::deletion_edit(ctx.source, import));
            }
        }

        let (field, variable, ty) = find_conventional_logger_field(root, ctx.source)
            .ok_or(ExchangeError::NoLoggerField)?;
        let bindings = Bindings::new()
            .logger(variable)
            .enclosing_type(adapter::type_name(ty, ctx.source));
        let declaration = templates::render_declaration(
            target,
            &bindings,
            self.config.effective_use_static(),
            self.config.effective_use_final(),
        )?;
        set.push_edit(SourceEdit::replace(
            field.start_byte(),
            field.end_byte(),
            declaration,
        ));
        Ok(set)
    }

    /// Edits adding `target`'s imports, computed against the post-exchange
    /// tree. The caller applies the exchange batch, re-parses, and applies
    /// this.
    pub fn import_edits(&self, root: Node, source: &str, target: &Profile) -> Vec<SourceEdit> {
        let paths = target.list_setting(keys::LOGGER_IMPORTS).to_vec();
        insert::import_insert_edit(root, source, &paths)
            .into_iter()
            .collect()
    }
}

fn path_matches_prefix(path: &str, prefix: &str) -> bool {
    !prefix.is_empty() && (path == prefix || path.starts_with(&format!("{prefix}.")))
}

/// The first field anywhere in the file whose declarator carries a
/// conventional logger name, with the matched variable name and the
/// declaring type.
fn find_conventional_logger_field<'t>(
    root: Node<'t>,
    source: &str,
) -> Option<(Node<'t>, String, Node<'t>)> {
    for ty in adapter::types(root) {
        for field in adapter::fields(ty) {
            for name in adapter::field_declarator_names(field, source) {
                let lower = name.to_lowercase();
                if CONVENTIONAL_LOGGER_NAMES.contains(&lower.as_str()) {
                    return Some((field, name, ty));
                }
            }
        }
    }
    None
}
