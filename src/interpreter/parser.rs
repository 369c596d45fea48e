/// Tier-by-tier reduction of a token stream into an expression tree.
///
/// Defines the intermediate `Slot` type, the per-tier consumption pass and the
/// `build_tree` entry point.
pub mod core;

/// Consumption of parenthesized groups.
///
/// Collects the slots between a `(` and its balancing `)`, then reduces them
/// recursively into the group's single child.
pub mod group;
