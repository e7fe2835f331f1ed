mod padding_test;
