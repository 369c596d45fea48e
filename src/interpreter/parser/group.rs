use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::{Marker, reclassify_negation},
        operator::OperatorKind,
        parser::core::{ParseResult, Slot, reduce},
    },
};

/// Deepest group nesting the tree builder accepts. Every level reduces its
/// contents through a nested call, so the limit bounds stack use.
pub const MAX_GROUP_DEPTH: usize = 256;

/// Consumes everything up to the `)` that balances an opening `(`.
///
/// The running count starts at 1 for the opening marker, rises with every
/// nested `(` and falls with every `)`; the group ends when it reaches 0. The
/// enclosed slots go through negation reclassification again, since a `-`
/// right after `(` opens its own scope, and are then reduced by the full tier
/// sequence. `depth` is the nesting level of this group, 1 for an outermost
/// one.
///
/// # Errors
/// - `NestingTooDeep` if `depth` exceeds [`MAX_GROUP_DEPTH`].
/// - `UnbalancedGrouping` with the outstanding count if `rest` runs out first.
/// - Any error from reducing the enclosed slots.
pub fn consume_group<I>(rest: &mut I, depth: usize) -> ParseResult<Slot>
    where I: Iterator<Item = Slot>
{
    if depth > MAX_GROUP_DEPTH {
        return Err(EvalError::NestingTooDeep { limit: MAX_GROUP_DEPTH });
    }

    let mut enclosed = Vec::new();
    let mut count: usize = 1;

    loop {
        let Some(slot) = rest.next() else {
            return Err(EvalError::UnbalancedGrouping { count });
        };

        match slot.marker_kind() {
            Some(OperatorKind::OpenGroup) => count += 1,
            Some(OperatorKind::CloseGroup) => {
                count -= 1;
                if count == 0 {
                    break;
                }
            },
            _ => {},
        }

        enclosed.push(slot);
    }

    let root = reduce(reclassify_negation(enclosed), depth)?;
    Ok(root.into_tree()
           .map_or(Slot::Stranded(OperatorKind::OpenGroup), |root| Slot::Tree(Expr::group(root))))
}
