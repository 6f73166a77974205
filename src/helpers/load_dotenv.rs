/// Loads a local `.env` if one exists. Returns whether a file was loaded.
pub fn load_dotenv() -> bool {
    dotenv::dotenv().is_ok()
}
