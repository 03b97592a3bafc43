//! Interactive session

use std::io::{self, BufRead, Write};

use jax::core::services::{Assistant, ReplyKind};
use jax::output::Renderer;

use super::{SessionOptions, finish};

/// Read commands from stdin until `bye` or end of input
///
/// Lines that are not valid UTF-8 are decoded lossily and answered like any
/// other input. Only a failed read ends the session early, and the final
/// save runs either way.
pub fn chat(options: &SessionOptions) -> anyhow::Result<()> {
    let (mut assistant, renderer) = options.open();
    renderer.render(&Assistant::greeting());

    let result = converse(&mut assistant, &renderer);
    finish(&assistant, &renderer);
    result
}

/// Answer stdin lines until `bye`, end of input or a read error
fn converse(assistant: &mut Assistant, renderer: &Renderer) -> anyhow::Result<()> {
    let mut input = io::stdin().lock();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let reply = assistant.respond(line.trim());
        renderer.render(&reply);
        io::stdout().flush()?;

        if reply.kind == ReplyKind::Exit {
            return Ok(());
        }
    }
}
