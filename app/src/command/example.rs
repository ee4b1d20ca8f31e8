use loophole_core::EXAMPLE_TEXT;

/// Strategy for printing the sample regulation text.
///
/// Pipe it into `explain` to try the report without your own input.
#[derive(Debug, Clone, Copy)]
pub struct ExampleStrategy;

impl super::CommandStrategy for ExampleStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("{EXAMPLE_TEXT}");
        Ok(())
    }
}
