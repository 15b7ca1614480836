use nfa_regex::Regex;

/// Patterns and inputs checked when no arguments are given.
const DEMO: &[(&str, &str)] = &[
    ("a*4.+hi", "aaaaaa4uhi"),
    ("a*4.+hi", "4uhi"),
    ("a*4.+hi", "meow"),
    ("a*4.+hi", "a4/hi"),
    ("a*b.+c", "abbxc"),
];

fn main() {
    let mut args = std::env::args().skip(1);
    let pattern = match args.next() {
        Some(pattern) => pattern,
        None => {
            demo();
            return;
        }
    };

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    println!("=== Pattern: {:?} ===", re.as_str());
    print!("{}", re.nfa());
    let mut all_matched = true;
    for input in args {
        let matched = re.is_match(&input);
        all_matched &= matched;
        println!("{:?}: {}", input, if matched { "match" } else { "no match" });
    }
    if !all_matched {
        std::process::exit(1);
    }
}

fn demo() {
    println!("NFA regex demo");
    println!("==============");
    println!("usage: nfa-regex PATTERN [INPUT...]");

    let mut last_pattern = "";
    for &(pattern, input) in DEMO {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                println!("Failed to compile {:?}: {}", pattern, e);
                continue;
            }
        };
        if pattern != last_pattern {
            println!("\n=== Pattern: {:?} ===", pattern);
            print!("{}", re.nfa());
            last_pattern = pattern;
        }
        let verdict = if re.is_match(input) { "match" } else { "no match" };
        println!("{:?}: {}", input, verdict);
    }
}
