diesel::table! {
    usuarios (id) {
        id -> BigInt,
        email -> Text,
        nome -> Text,
        sobrenome -> Text,
        password_hash -> Text,
        avatar -> Nullable<Text>,
        is_active -> Bool,
        is_admin -> Bool,
    }
}

diesel::table! {
    generos (id) {
        id -> BigInt,
        descricao -> Text,
        imagem -> Nullable<Text>,
    }
}

diesel::table! {
    bandas (id) {
        id -> BigInt,
        nome -> Text,
        genero_id -> BigInt,
        imagem -> Nullable<Text>,
    }
}

diesel::table! {
    albums (id) {
        id -> BigInt,
        nome -> Text,
        banda_id -> BigInt,
        data_lancamento -> Integer,
        capa -> Text,
    }
}

diesel::table! {
    musicas (id) {
        id -> BigInt,
        nome -> Text,
        album_id -> BigInt,
        ordem -> Nullable<Integer>,
        arquivo -> Text,
        arquivo_tipo -> Nullable<Text>,
        duracao_ms -> Nullable<BigInt>,
    }
}

diesel::table! {
    likes (id) {
        id -> BigInt,
        data -> Text,
        usuario_id -> BigInt,
        musica_id -> BigInt,
    }
}

diesel::table! {
    tokens (chave) {
        chave -> Text,
        usuario_id -> BigInt,
    }
}

diesel::joinable!(bandas -> generos (genero_id));
diesel::joinable!(albums -> bandas (banda_id));
diesel::joinable!(musicas -> albums (album_id));
diesel::joinable!(likes -> usuarios (usuario_id));
diesel::joinable!(likes -> musicas (musica_id));
diesel::joinable!(tokens -> usuarios (usuario_id));

diesel::allow_tables_to_appear_in_same_query!(
  usuarios,
  generos,
  bandas,
  albums,
  musicas,
  likes,
  tokens,
);
