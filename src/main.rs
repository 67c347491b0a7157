// Read whitespace separated tokens, from command line arguments or,
// when there are none, from stdin. Index each token with its position,
// later positions overwriting earlier ones, and print the index in
// sort order along with its order statistics.
//
//   $ echo "S E A R C H E X A M P L E" | RUST_LOG=info llrb-map

use std::{env, error, io, io::Read};

use log::info;

use llrb_map::Llrb;

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        args.join(" ")
    };

    let mut index: Llrb<String, usize> = Llrb::new("tokens");
    for (i, token) in text.split_whitespace().enumerate() {
        index.put(token.to_string(), i);
    }

    for (key, value) in index.iter() {
        println!("{} {}", key, value);
    }
    if index.is_empty() {
        return Ok(());
    }

    println!();
    println!("len    = {}", index.len());
    println!("height = {}", index.height());
    println!("min    = {}", index.min()?);
    println!("max    = {}", index.max()?);

    let stats = index.validate()?;
    info!("{}: {} entries, blacks {:?}", index.id(), stats.entries(), stats.blacks());
    if let Some(depths) = stats.depths() {
        depths.pretty_print("");
    }
    Ok(())
}
