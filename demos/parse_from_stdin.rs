use whatwg_url::{Url, ValidationError};
use std::io;

fn main() {
    let report = |e: ValidationError| println!("Validation error: {e}");
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match Url::options().validation_callback(Some(&report)).parse(&line) {
            Ok(url) => println!("{url:#?}"),
            Err(e) => println!("Error: {e}"),
        };
    }
}
