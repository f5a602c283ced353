// Output formatting: terminal display and wordlist file generation.

pub mod terminal;
pub mod wordlist;
