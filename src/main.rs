#[cfg(feature = "csr")]
pub fn main() {
    // client-side entry point, to run: `trunk serve --open`
    use brewratings::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no entry point without the csr feature; the crate is library-only then
}
