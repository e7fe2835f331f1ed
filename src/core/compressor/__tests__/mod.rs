mod result_test;
