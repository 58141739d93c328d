#[cfg(feature = "csr")]
fn main() {
    hashnav_web::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The application only runs in the browser; build with `--features csr`.
}
