use anyhow::Result;
use crux_core::typegen::TypeGen;
use config_editor_core::{
    events::{ConfigurationEvent, EditorEvent, UiEvent},
    types::{
        ConfigValue, ConstraintKind, ConstraintPolicy, EditSurface, EditorTrigger,
        SubmissionState, TenancyScope, Theme, ValueType,
    },
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<EditorEvent>()?;
    gen.register_type::<ConfigurationEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<ConfigValue>()?;
    gen.register_type::<ValueType>()?;
    gen.register_type::<ConstraintKind>()?;
    gen.register_type::<ConstraintPolicy>()?;
    gen.register_type::<Theme>()?;
    gen.register_type::<TenancyScope>()?;
    gen.register_type::<EditSurface>()?;
    gen.register_type::<SubmissionState>()?;
    gen.register_type::<EditorTrigger>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
