fn main() {
    #[cfg(feature = "csr")]
    pasture::start();
}
