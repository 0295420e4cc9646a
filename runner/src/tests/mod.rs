use std::env;
use std::fs;

use shell::{Session, SessionOptions};

use crate::repl;


fn write_transcript(folder: &str, name: &str, transcript: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}.txt"), transcript).unwrap();
}

fn read_transcript(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{folder}/{name}.txt")).unwrap()
}

/// Feeds `script` to a fresh session and compares everything it printed
/// with the stored transcript. Set `WRITE_OUTPUT` to store it instead.
fn run(folder: &str, name: &str, options: SessionOptions, script: &str) {
    let mut session = Session::new(options);
    let mut out = Vec::new();
    repl::run(&mut session, script.as_bytes(), &mut out, false).unwrap();
    let output = String::from_utf8(out).unwrap();

    if env::var("WRITE_OUTPUT").is_ok() {
        write_transcript(folder, name, &output);
    } else {
        let reference = read_transcript(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}
