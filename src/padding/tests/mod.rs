mod test_padding_80;
mod test_pkcs7;
