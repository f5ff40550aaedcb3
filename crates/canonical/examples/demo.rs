use canonical::{partition, tokenize};

fn main() {
    let input = "It was the best of times, it was the worst of times";
    let reference = "It was the best of times, it was the worst of times, it was the age of wisdom";

    let tokens = tokenize(reference);
    println!("reference tokens ({}):", tokens.len());
    for token in &tokens {
        println!("  {:>3}..{:<3} {:?}", token.start, token.end, token.text);
    }

    let split = partition(input, &tokens);
    println!("found in input:     {:?}", split.found);
    println!("not found in input: {:?}", split.not_found);
}
