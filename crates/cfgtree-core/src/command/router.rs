//! Routing of command lines through a configuration tree.

use std::fmt;

use tracing::{debug, error, info, trace, warn};

use super::errors::CommandError;
use super::mode::ProcessMode;
use super::parse::{CommandLine, Directive, Target, classify};
use crate::config::CfgTreeConfig;
use crate::expand::{EnvExpander, PathExpander};
use crate::factory::FactoryRegistry;
use crate::node::ConfigNode;

/// Routes commands from a root node down to the node they address.
///
/// The router carries the state that outlives a single command: the
/// prepend path used by `.`-shorthand, the factories used by `delegate()`
/// and the current `include()` depth. One router drives one tree.
pub struct Router {
    factories: FactoryRegistry,
    expander: Box<dyn PathExpander>,
    namespace: String,
    max_include_depth: usize,
    pub(crate) comment_marker: String,
    prepend: String,
    include_depth: usize,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("factories", &self.factories)
            .field("namespace", &self.namespace)
            .field("max_include_depth", &self.max_include_depth)
            .field("comment_marker", &self.comment_marker)
            .field("prepend", &self.prepend)
            .finish()
    }
}

impl Router {
    /// A router with default settings and environment path expansion.
    pub fn new(factories: FactoryRegistry) -> Self {
        Self::with_config(factories, &CfgTreeConfig::default())
    }

    pub fn with_config(factories: FactoryRegistry, config: &CfgTreeConfig) -> Self {
        Self {
            factories,
            expander: Box::new(EnvExpander),
            namespace: config.router.namespace.clone(),
            max_include_depth: config.router.max_include_depth,
            comment_marker: config.batch.comment_marker.clone(),
            prepend: String::new(),
            include_depth: 0,
        }
    }

    /// Replace the expander used for `include()` paths.
    pub fn with_expander(mut self, expander: impl PathExpander + 'static) -> Self {
        self.expander = Box::new(expander);
        self
    }

    /// The path `.`-prefixed commands are appended to.
    pub fn prepend(&self) -> &str {
        &self.prepend
    }

    pub fn factories(&self) -> &FactoryRegistry {
        &self.factories
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Apply one command line to the tree rooted at `root`.
    pub fn process_command(
        &mut self,
        root: &mut dyn ConfigNode,
        line: &str,
    ) -> Result<(), CommandError> {
        self.process_command_with_mode(root, line, ProcessMode::All)
    }

    pub fn process_command_with_mode(
        &mut self,
        root: &mut dyn ConfigNode,
        line: &str,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        let result = self.execute(root, line, mode);
        if let Err(e) = &result {
            error!(
                event = "core.command.invalid",
                command = line,
                mode = %mode,
                error = %e,
                "\"{}\" is not a valid command",
                line
            );
        }
        result
    }

    /// Expand shorthand, update the prepend path, filter by mode and route.
    pub(crate) fn execute(
        &mut self,
        root: &mut dyn ConfigNode,
        line: &str,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        let Some(mut command) = CommandLine::parse(line) else {
            return Ok(());
        };

        if command.is_shorthand() {
            let expanded = format!("{}{}", self.prepend, command.address);
            trace!(
                event = "core.command.shorthand_expanded",
                from = %command.address,
                to = %expanded
            );
            command.address = expanded;
        }

        if !command.has_args() {
            debug!(event = "core.command.prepend_changed", prepend = %command.address);
            self.prepend = command.address;
            return Ok(());
        }

        if !mode.admits(command.leaf()) {
            trace!(
                event = "core.command.skipped",
                address = %command.address,
                mode = %mode
            );
            return Ok(());
        }

        self.route(root, &command.address, &command.args, mode)
    }

    fn route(
        &mut self,
        node: &mut dyn ConfigNode,
        address: &str,
        args: &str,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        match classify(address) {
            Target::Broadcast { rest } => self.broadcast(node, rest, args, mode),
            Target::Forward { delegate, rest } => {
                let child = match node.core_mut().delegates_mut().get_mut(delegate) {
                    Ok(child) => child,
                    Err(_) => {
                        warn!(event = "core.command.delegate_not_found", delegate = delegate);
                        return Err(CommandError::NoSuchDelegate {
                            name: delegate.to_string(),
                        });
                    }
                };
                trace!(event = "core.command.forwarded", delegate = delegate, rest = rest);
                self.route(child, rest, args, mode)
            }
            Target::Directive(Directive::Delegate) => self.create_delegate(node, args),
            Target::Directive(Directive::Include) => self.include(node, args, mode),
            Target::Value(name) => assign(node, name, args),
        }
    }

    /// Forward to every child. Children are processed independently: one
    /// failure does not undo or stop the others.
    fn broadcast(
        &mut self,
        node: &mut dyn ConfigNode,
        rest: &str,
        args: &str,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        let mut failures = Vec::new();
        for (name, delegate) in node.core_mut().delegates_mut().iter_mut() {
            if let Err(e) = self.route(delegate.node.as_mut(), rest, args, mode) {
                warn!(
                    event = "core.command.broadcast_member_failed",
                    delegate = name,
                    error = %e
                );
                failures.push((name.to_string(), e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CommandError::Broadcast { failures })
        }
    }

    fn create_delegate(&mut self, node: &mut dyn ConfigNode, args: &str) -> Result<(), CommandError> {
        let tokens = directive_args(Directive::Delegate, args)?;
        let (name, type_name) = (tokens[0], tokens[1]);

        if node.core().delegates().contains(name) {
            warn!(event = "core.factory.delegate_exists", name = name);
            return Err(CommandError::DelegateExists {
                name: name.to_string(),
            });
        }

        let Some((resolved, child)) = self.factories.create(type_name, &self.namespace) else {
            warn!(
                event = "core.factory.type_not_found",
                type_name = type_name,
                namespace = %self.namespace
            );
            return Err(CommandError::UnknownDelegateType {
                type_name: type_name.to_string(),
            });
        };

        node.core_mut()
            .delegates_mut()
            .register(name, child, resolved.as_str())?;
        info!(
            event = "core.factory.delegate_created",
            name = name,
            type_name = %resolved
        );
        Ok(())
    }

    fn include(
        &mut self,
        node: &mut dyn ConfigNode,
        args: &str,
        mode: ProcessMode,
    ) -> Result<(), CommandError> {
        let tokens = directive_args(Directive::Include, args)?;
        let path = self.expander.expand(tokens[0])?;

        if self.include_depth >= self.max_include_depth {
            warn!(
                event = "core.batch.include_depth_exceeded",
                path = %path.display(),
                limit = self.max_include_depth
            );
            return Err(CommandError::IncludeDepthExceeded {
                path,
                limit: self.max_include_depth,
            });
        }

        self.include_depth += 1;
        let result = self.process_file(node, &path, mode);
        self.include_depth -= 1;
        result
    }
}

fn assign(node: &mut dyn ConfigNode, name: &str, value: &str) -> Result<(), CommandError> {
    if let Err(e) = node.core_mut().values_mut().assign(name, value) {
        warn!(event = "core.command.setting_not_found", name = name);
        return Err(e.into());
    }
    debug!(event = "core.command.value_assigned", name = name, value = value);
    node.on_value_changed(name, value);
    Ok(())
}

fn directive_args(directive: Directive, args: &str) -> Result<Vec<&str>, CommandError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() != directive.arity() {
        warn!(
            event = "core.command.malformed_directive",
            directive = directive.token(),
            found = tokens.len()
        );
        return Err(CommandError::MalformedDirective {
            directive: directive.token(),
            expected: directive.arity(),
            found: tokens.len(),
        });
    }
    Ok(tokens)
}
