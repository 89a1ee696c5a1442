use typed_builder::TypedBuilder;

/// Settings for one emulation run.
///
/// ```
/// use intel8080::RunConfig;
///
/// let config = RunConfig::builder().origin(0x0100).build();
/// assert_eq!(config.origin, 0x0100);
/// assert!(!config.undocumented_aliases);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    /// Address the image is copied to; also the initial program counter.
    #[builder(default)]
    pub origin: u16,
    /// Decode the twelve undocumented opcode bytes as their documented
    /// aliases instead of faulting on them.
    #[builder(default)]
    pub undocumented_aliases: bool,
}
