use log::info;
use subseq::dynamic::{lcs_all, lcs_length, lcs_sequence, longest_increasing_subsequence_values};

fn demo_lcs() {
    let x = "abcdefg";
    let y = "bcdgk";
    println!("The length of LCS of {} and {} is {}", x, y, lcs_length(x, y));
    println!("The LCS of {} and {} is {}", x, y, lcs_sequence(x, y));

    let m = "AGCAT";
    let n = "GAC";
    println!("The LCS of {} and {} are", m, n);
    for lcs in lcs_all(m, n) {
        println!("{}", lcs);
    }
}

fn demo_lis() {
    let numbers = [1, 9, 3, 8, 11, 4];
    let lis = longest_increasing_subsequence_values(&numbers);
    let rendered: Vec<String> = lis.iter().map(|v| v.to_string()).collect();
    println!("The LIS of {:?} is {}", numbers, rendered.join(" "));
}

fn main() {
    env_logger::init();
    info!("running subsequence demo");

    demo_lcs();
    demo_lis();
}
