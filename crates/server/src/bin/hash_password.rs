//! Print an Argon2 hash for seeding a `users` row by hand.
//!
//! ```text
//! cargo run -p server --features server --bin hash-password -- 's3cret!'
//! ```

fn main() {
    let password = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "healthdesk123".to_string());

    match server::auth::password::hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
