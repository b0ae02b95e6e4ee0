use clap::Parser;
use settheory::object::Object;

/// settheory collects its arguments into a set of atoms and prints it in
/// `{a, b, c}` notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Wraps the resulting set in this many singleton sets, so `--nest 2 a`
    /// prints `{{{a}}}`.
    #[arg(short, long, default_value_t = 0)]
    nest: usize,

    /// Prints each element of the resulting set on its own line instead of
    /// the whole set.
    #[arg(short, long)]
    list: bool,

    /// Enables debug logging. `RUST_LOG` overrides this.
    #[arg(short, long)]
    verbose: bool,

    /// Names of the atoms to collect. Duplicates are printed once.
    atoms: Vec<String>,
}

/// Builds the set described by `args` and renders it as the text to print,
/// one line per element in list mode.
fn render(args: &Args) -> String {
    let mut object: Object = args.atoms.iter().map(String::as_str).map(Object::from).collect();
    log::debug!("collected {} distinct atom(s)", object.len());

    for _ in 0..args.nest {
        object = Object::set([object]);
    }

    if args.list {
        object.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    } else {
        object.to_string()
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = render(&args);
    if !output.is_empty() {
        println!("{output}");
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, render};

    fn render_args(argv: &[&str]) -> String {
        let args = Args::try_parse_from(std::iter::once("settheory").chain(argv.iter().copied()))
                   .unwrap_or_else(|e| panic!("bad arguments {argv:?}: {e}"));
        render(&args)
    }

    #[test]
    fn collects_atoms_into_a_set() {
        assert_eq!(render_args(&["b", "a", "c"]), "{a, b, c}");
        assert_eq!(render_args(&[]), "{}");
    }

    #[test]
    fn duplicate_arguments_print_once() {
        assert_eq!(render_args(&["a", "b", "a", "a"]), "{a, b}");
    }

    #[test]
    fn nest_wraps_in_singletons() {
        assert_eq!(render_args(&["--nest", "2", "a"]), "{{{a}}}");
        assert_eq!(render_args(&["-n", "1"]), "{{}}");
    }

    #[test]
    fn list_prints_one_element_per_line() {
        assert_eq!(render_args(&["--list", "b", "a", "b"]), "a\nb");
        assert_eq!(render_args(&["--list"]), "");
    }

    #[test]
    fn nest_and_list_list_the_outer_set() {
        assert_eq!(render_args(&["--nest", "1", "--list", "a", "b"]), "{a, b}");
        assert_eq!(render_args(&["-l", "-n", "2", "a"]), "{{a}}");
    }

    #[test]
    fn deep_nesting_renders() {
        let output = render_args(&["--nest", "200000", "a"]);

        assert_eq!(output.len(), 2 * 200_000 + 3);
        assert!(output.starts_with("{{{"));
        assert!(output.contains("{a}"));
    }
}
