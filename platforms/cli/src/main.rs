use clap::Parser;
use turl::{decode_path, Step};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine to run, in <transitions>/<state>/<tape> form
    machine: String,

    /// Print each configuration as the machine steps
    #[clap(short = 'd', long)]
    debug: bool,

    /// Stop after this many steps even if the machine hasn't halted
    #[clap(short = 'n', long, default_value_t = 10_000)]
    max_steps: usize,
}

fn main() {
    let cli = Cli::parse();

    let mut machine = match decode_path(&cli.machine) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut steps = 0;

    while steps < cli.max_steps {
        if machine.step() == Step::Halt {
            break;
        }

        steps += 1;

        if cli.debug {
            println!(
                "Step: {}, State: {}, Tape: {}, Head: {}",
                steps,
                machine.state(),
                machine.tape_string(),
                machine.head()
            );
        }
    }

    if machine.is_halted() {
        println!("Machine halted after {steps} steps.");
    } else {
        println!("Step limit of {} reached.", cli.max_steps);
    }

    println!("{machine}");
}
