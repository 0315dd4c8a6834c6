use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use log::{error, info};

fn read_input() -> io::Result<String> {
  match env::args().nth(1) {
    Some(path) => {
      info!("reading grid from {}", path);
      fs::read_to_string(path)
    }
    None => {
      let mut src = String::new();
      io::stdin().read_to_string(&mut src)?;
      Ok(src)
    }
  }
}

fn main() {
  env_logger::init();

  let src = match read_input() {
    Ok(src) => src,
    Err(e) => {
      error!("failed to read input: {}", e);
      eprintln!("{}", e);
      process::exit(1);
    }
  };

  match lifestep::next_generation(src) {
    Ok(next) => print!("{}", next),
    Err(e) => {
      eprintln!("{}", e);
      process::exit(1);
    }
  }
}
