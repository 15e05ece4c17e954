//! Issue an HS256 token with a random key, then decode and verify it.
//!
//! Run with `RUST_LOG=debug cargo run -p tessera_jwt --example issue_token`.

use rand::Rng;
use tessera_common::LoggingTransformer;
use tessera_jwt::{Claims, Header, Jwt, JwtResult};

const KEY_LENGTH: usize = 32;

fn main() -> JwtResult<()> {
    LoggingTransformer::init();

    let mut secret = [0u8; KEY_LENGTH];
    rand::rng().fill(&mut secret);

    let claims = Claims::new()
        .with("username", "qwerty")
        .with("email", "qwerty@example.com");

    let mut jwt = Jwt::new(&Header::hs256(), &claims, &secret)?;
    let token = jwt.encode()?.to_owned();
    LoggingTransformer::log_token_issued(&secret, token.len());
    println!("{token}");

    let (header, payload) = jwt.decode()?;
    println!("{header}");
    println!("{payload}");

    jwt.verify()?;
    println!("signature ok");
    Ok(())
}
