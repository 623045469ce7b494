mod formatter;

use anyhow::Result;
use clap::Parser;
use termynus::{build_tree, evaluate, shunting_yard, tokenize, Environment};

#[derive(Parser)]
#[command(name = "termynus")]
#[command(about = "Evaluate a termynus expression")]
#[command(
    long_about = "Parses and evaluates a termynus expression. The intermediate pipeline \
stages (token stream, RPN stream, parse tree) can be printed alongside the result."
)]
#[command(version)]
struct Cli {
    /// Print the numbered token stream
    #[arg(long = "parse")]
    show_tokens: bool,

    /// Print the RPN node stream
    #[arg(long = "rpn")]
    show_rpn: bool,

    /// Print the parse tree indented by depth
    #[arg(long = "tree")]
    show_tree: bool,

    /// The expression to evaluate
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let Some(expression) = cli.expression.as_deref() else {
        eprintln!("Error: no expression given");
        eprintln!();
        eprintln!("Usage: termynus [--parse] [--rpn] [--tree] \"<expression>\"");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  termynus \"(5 + 3) * 2\"");
        eprintln!("  termynus --tree \"min(1, 2) + list.length([1, 2, 3])\"");
        std::process::exit(1);
    };

    if let Err(err) = run(expression, cli.show_tokens, cli.show_rpn, cli.show_tree) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(expression: &str, show_tokens: bool, show_rpn: bool, show_tree: bool) -> Result<()> {
    let tokens = tokenize(expression)?;
    if show_tokens {
        print!("{}", formatter::format_tokens(&tokens));
    }

    let rpn = shunting_yard(&tokens)?;
    if show_rpn {
        print!("{}", formatter::format_rpn(&rpn));
    }

    let tree = build_tree(rpn)?;
    if show_tree {
        print!("{}", formatter::format_tree(&tree));
    }

    let mut env = Environment::new();
    let value = evaluate(&tree, &mut env)?;
    println!("Result: {}", value);

    Ok(())
}
