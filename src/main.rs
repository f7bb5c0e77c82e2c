use std::io;
use termdonut::{Animator, RendererConfig, TerminalGuard};

fn main() -> io::Result<()> {
    let _guard = TerminalGuard::new()?;
    let mut animator = Animator::new(RendererConfig::default());
    animator.run(&mut io::stdout(), None)
}
