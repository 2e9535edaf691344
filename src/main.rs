fn main() {
    #[cfg(target_arch = "wasm32")]
    tatar_cooking::web::start();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("tatar-cooking runs in the browser: build it with `trunk serve`.");
}
