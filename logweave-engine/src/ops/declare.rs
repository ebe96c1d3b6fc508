//! Logger field declaration.

use logweave_core::errors::OpError;

use super::context::{EditSet, Notice, OperationContext};
use super::{insert, LoggingEngine};
use crate::adapter;
use crate::templates::{self, keys, Bindings};

impl LoggingEngine<'_> {
    /// Declare the logger field as the first member of the selected type,
    /// adding the convention's imports when configured.
    ///
    /// Idempotent: a field already named like the configured logger turns
    /// the whole operation into a notice, so "declare logger" can be
    /// invoked repeatedly without stacking fields.
    pub fn declare_logger(&self, ctx: &OperationContext) -> Result<EditSet, OpError> {
        let ty = ctx.selected_type()?;
        let logger_name = self.config().effective_logger_name();

        if adapter::find_field(ty, ctx.source, logger_name).is_some() {
            tracing::debug!(logger = logger_name, "logger field already present");
            return Ok(EditSet::with_notice(Notice::LoggerAlreadyDeclared));
        }

        let bindings = Bindings::new()
            .logger(logger_name)
            .enclosing_type(adapter::type_name(ty, ctx.source));
        let declaration = templates::render_declaration(
            self.profile(),
            &bindings,
            self.config().effective_use_static(),
            self.config().effective_use_final(),
        )?;

        let mut set = EditSet::default();
        set.push_edit(insert::insert_first_member(ctx.source, ty, &declaration));

        if self.config().effective_add_imports() {
            let paths = self.profile().list_setting(keys::LOGGER_IMPORTS).to_vec();
            if let Some(edit) = insert::import_insert_edit(ctx.root(), ctx.source, &paths) {
                set.push_edit(edit);
            }
        }
        Ok(set)
    }
}
