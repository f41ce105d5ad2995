use crate::exit::{CliResult, SUCCESS};

pub fn run() -> CliResult<i32> {
    println!("ttyibis {}", env!("CARGO_PKG_VERSION"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!(
        "target: {}",
        option_env!("TTYIBIS_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("This is free software; see the source for copying conditions.  There is NO");
    println!("warranty; not even for MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.");

    Ok(SUCCESS)
}
