mod apis;
mod paths;
mod writer;
