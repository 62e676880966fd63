//! Test: unknown field options are rejected.

use api_transform::Mapped;

#[derive(Mapped)]
struct Account {
    #[mapping(secret)]
    password: String,
}

fn main() {
    let account = Account {
        password: String::new(),
    };
    let _ = account.password;
}
