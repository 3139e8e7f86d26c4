mod text_sanitizer_test;
