mod identifier;
mod util;
