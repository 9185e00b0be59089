//! Mapping parsed types to target language type expressions.

use cs2ts_core::NameTrimmer;

use crate::TypeNode;

/// Generic containers that get a dedicated rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Single-argument sequence, e.g. `List<T>`
    Sequence,
    /// Key/value container, e.g. `Dictionary<K, V>`
    Dictionary,
    /// Explicit nullable wrapper, e.g. `Nullable<T>`
    Nullable,
}

/// Trait for mapping parsed source types to a target language.
///
/// Implementors provide the name tables and the rendering of each
/// construct; [`TypeMapper::emit`] fixes the composition order:
/// base or generic rendering, then array suffixes, then nullability.
pub trait TypeMapper {
    /// Map a primitive base name (e.g. `int` -> `number`).
    ///
    /// Returns `None` for names that pass through unchanged.
    fn map_base_name(&self, name: &str) -> Option<&'static str>;

    /// Classify a generic container by name and argument count.
    fn container(&self, name: &str, arity: usize) -> Option<Container>;

    /// Render a sequence of `element`.
    fn render_sequence(&self, element: &str) -> String;

    /// Render a key/value container.
    fn render_dictionary(&self, key: &str, value: &str) -> String;

    /// Render `ty` with `rank` array dimensions.
    fn render_array(&self, ty: &str, rank: usize) -> String;

    /// Render the nullable form of `ty`.
    fn render_nullable(&self, ty: &str) -> String;

    /// Render a generic type the mapper has no special form for.
    fn render_generic(&self, name: &str, arguments: &[String]) -> String {
        format!("{}<{}>", name, arguments.join(", "))
    }

    /// Emit the target type expression for `node`.
    ///
    /// Pass-through base names go through `trimmer`, so postfix trimming
    /// applies to user types wherever they are nested.
    fn emit(&self, node: &TypeNode, trimmer: &NameTrimmer) -> String {
        let mut nullable = node.is_nullable;
        let args = &node.generic_arguments;

        let core = match self.container(&node.base_name, args.len()) {
            Some(Container::Sequence) => self.render_sequence(&self.emit(&args[0], trimmer)),
            Some(Container::Dictionary) => self.render_dictionary(
                &self.emit(&args[0], trimmer),
                &self.emit(&args[1], trimmer),
            ),
            Some(Container::Nullable) => {
                nullable = true;
                let inner = TypeNode {
                    is_nullable: false,
                    ..args[0].clone()
                };
                self.emit(&inner, trimmer)
            }
            None => {
                let name = match self.map_base_name(&node.base_name) {
                    Some(mapped) => mapped.to_string(),
                    None => trimmer.trim(&node.base_name),
                };
                if node.is_generic() {
                    let arguments: Vec<String> =
                        args.iter().map(|arg| self.emit(arg, trimmer)).collect();
                    self.render_generic(&name, &arguments)
                } else {
                    name
                }
            }
        };

        let ty = if node.is_array() {
            self.render_array(&core, node.array_rank)
        } else {
            core
        };

        if nullable {
            self.render_nullable(&ty)
        } else {
            ty
        }
    }
}
