/// Binary entrypoint for the `catclip` executable.
///
/// Keeps the binary thin — all business logic lives in the `catclip_lib`
/// crate so unit tests can import library functions directly.
fn main() {
    catclip_lib::run();
}
