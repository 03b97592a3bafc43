//! One-shot command

use super::{SessionOptions, finish};

/// Run a single command line and print its reply
///
/// Command errors are replies, not failures: the exit status stays zero.
/// Both lists get the same final save as an interactive session.
pub fn exec(line: &str, options: &SessionOptions) -> anyhow::Result<()> {
    let (mut assistant, renderer) = options.open();
    let reply = assistant.respond(line.trim());
    renderer.render(&reply);
    finish(&assistant, &renderer);
    Ok(())
}
