//! Generated TypeScript bindings for the configuration editor core live in `generated/`.
