//! Demo library seed data

use anyhow::Context;
use estante_core::{Book, Chapter, Language, Library, TranslationInfo};

/// A three-book starter library of Brazilian classics
///
/// Dom Casmurro arrives mid-read with translations in flight, O Cortiço has
/// one partial translation, and Iracema is untouched, so every library and
/// reader state is reachable from the first screen.
pub fn demo_library() -> anyhow::Result<Library> {
    let en = Language::by_code("en").context("missing catalog language")?;
    let es = Language::by_code("es").context("missing catalog language")?;
    let fr = Language::by_code("fr").context("missing catalog language")?;

    let dom_casmurro = Book::new(
        "Dom Casmurro",
        "Machado de Assis",
        vec![
            Chapter::new(
                "c1",
                "Capítulo I - Do título",
                "Uma noite destas, vindo da cidade para o Engenho Novo, encontrei no \
                 trem da Central um rapaz aqui do bairro, que eu conheço de vista e de \
                 chapéu. Cumprimentou-me, sentou-se ao pé de mim, falou da lua e dos \
                 ministros, e acabou recitando-me versos. A viagem era curta, e os \
                 versos pode ser que não fossem inteiramente maus. Sucedeu, porém, que, \
                 como eu estava cansado, fechei os olhos três ou quatro vezes; tanto \
                 bastou para que ele interrompesse a leitura e metesse os versos no bolso.",
            )
            .translated(),
            Chapter::new(
                "c2",
                "Capítulo II - Do livro",
                "— Agora que expliquei o título, passo a escrever o livro. Antes disso, \
                 porém, digamos os motivos que me põem a pena na mão. Vivo só, com um \
                 criado. A casa em que moro é própria; fi-la construir de propósito, \
                 levado de um desejo tão particular que me vexa imprimi-lo, mas vá lá.",
            )
            .translated(),
        ],
    )
    .with_id("dom-casmurro")
    .with_cover("https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=300&h=400&fit=crop")
    .with_position(1, 45.0)
    .with_translation(TranslationInfo::new(en, 100.0, true))
    .with_translation(TranslationInfo::new(es, 100.0, true))
    .with_translation(TranslationInfo::new(fr, 75.0, false));

    let o_cortico = Book::new(
        "O Cortiço",
        "Aluísio Azevedo",
        vec![Chapter::new(
            "c1",
            "Capítulo I",
            "João Romão foi, dos treze aos vinte e cinco anos, empregado de um \
             vendeiro que enriqueceu entre as quatro paredes de uma suja e obscura \
             taverna nos refolhos do bairro do Botafogo; e tanto economizou do pouco \
             que ganhava, que, ao sair de lá, pode meter-se num pequeno negócio de \
             secos e molhados.",
        )],
    )
    .with_id("o-cortico")
    .with_cover("https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop")
    .with_position(0, 15.0)
    .with_translation(TranslationInfo::new(en, 30.0, false));

    let iracema = Book::new(
        "Iracema",
        "José de Alencar",
        vec![Chapter::new(
            "c1",
            "I",
            "Verdes mares bravios de minha terra natal, onde canta a jandaia nas \
             frondes da carnaúba; Verdes mares, que brilhais como líquida esmeralda \
             aos raios do sol nascente, perlongando as alvas praias ensombradas de \
             coqueiros.",
        )],
    )
    .with_id("iracema")
    .with_cover(
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=400&fit=crop",
    );

    Library::from_books(vec![dom_casmurro, o_cortico, iracema]).context("invalid demo library")
}
