use std::io::{self, BufRead, Write};
use truthtable::TruthTable;

const PROMPT: &str = "Enter proposition: ";

fn disp<W: Write>(expression: &str, output: &mut W) -> io::Result<()> {
	match TruthTable::generate(expression) {
		Ok(Some(table)) => write!(output, "{}", table),
		Ok(None) => Ok(()),
		Err(err) => {
			log::warn!("rejected {:?}: {}", expression, err);
			writeln!(output, "Invalid expression!")
		}
	}
}

/// Prompt, read a line, print its table, until `quit` or end of input.
fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
	let mut line = String::new();
	loop {
		write!(output, "{}", PROMPT)?;
		output.flush()?;
		line.clear();
		if input.read_line(&mut line)? == 0 {
			break;
		}
		let expression = line.strip_suffix('\n').unwrap_or(&line);
		let expression = expression.strip_suffix('\r').unwrap_or(expression);
		if expression == "quit" {
			break;
		}
		disp(expression, &mut output)?;
	}
	Ok(())
}

fn main() -> io::Result<()> {
	env_logger::init();
	let stdin = io::stdin();
	let stdout = io::stdout();
	run(stdin.lock(), stdout.lock())
}
