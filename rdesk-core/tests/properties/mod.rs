mod history_tests;
mod search_tests;
