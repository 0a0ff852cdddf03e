/// A fixed set of seed records.
#[derive(Debug)]
pub struct Catalog {
    pub categories: &'static [CategorySeed],
    pub articles: &'static [ArticleSeed],
    pub solutions: &'static [SolutionSeed],
}

#[derive(Debug)]
pub struct CategorySeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: Option<&'static str>,
    pub icon_name: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

/// Article seed. `category_slug` must name a category in the same catalog;
/// `publish_date` is RFC 3339.
#[derive(Debug)]
pub struct ArticleSeed {
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image_url: Option<&'static str>,
    pub publish_date: &'static str,
    pub category_slug: &'static str,
    pub featured: bool,
}

#[derive(Debug)]
pub struct SolutionSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: Option<&'static str>,
    pub link: &'static str,
    pub link_text: &'static str,
}

pub static BUILTIN: Catalog = Catalog {
    categories: CATEGORIES,
    articles: ARTICLES,
    solutions: SOLUTIONS,
};

// ============================================================================
// Categories
// ============================================================================

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Direito do Consumidor",
        slug: "direito-consumidor",
        description: Some(
            "Seus direitos nas relações de consumo: trocas, garantias, cobranças indevidas e contratos de serviço.",
        ),
        icon_name: Some("shopping-cart"),
        image_url: Some("/images/categorias/consumidor.jpg"),
    },
    CategorySeed {
        name: "Direito Trabalhista",
        slug: "direito-trabalhista",
        description: Some(
            "Contrato de trabalho, rescisão, férias, horas extras e verbas rescisórias explicadas de forma simples.",
        ),
        icon_name: Some("briefcase"),
        image_url: Some("/images/categorias/trabalhista.jpg"),
    },
    CategorySeed {
        name: "Direito de Família",
        slug: "direito-familia",
        description: Some(
            "Divórcio, guarda de filhos, pensão alimentícia, união estável e inventário.",
        ),
        icon_name: Some("users"),
        image_url: Some("/images/categorias/familia.jpg"),
    },
    CategorySeed {
        name: "Direito Imobiliário",
        slug: "direito-imobiliario",
        description: Some(
            "Locação, compra e venda de imóveis, condomínio e regularização de propriedade.",
        ),
        icon_name: Some("home"),
        image_url: Some("/images/categorias/imobiliario.jpg"),
    },
    CategorySeed {
        name: "Direito Previdenciário",
        slug: "direito-previdenciario",
        description: Some(
            "Aposentadoria, auxílio-doença, BPC/LOAS e revisão de benefícios do INSS.",
        ),
        icon_name: Some("shield"),
        image_url: Some("/images/categorias/previdenciario.jpg"),
    },
    CategorySeed {
        name: "Direito Civil",
        slug: "direito-civil",
        description: Some(
            "Contratos, responsabilidade civil, indenizações e cobrança de dívidas.",
        ),
        icon_name: Some("scale"),
        image_url: None,
    },
];

// ============================================================================
// Articles
// ============================================================================

const ARTICLES: &[ArticleSeed] = &[
    ArticleSeed {
        title: "Produto com defeito: prazos para troca e reclamação",
        slug: "produto-com-defeito-prazos-troca",
        excerpt: "Entenda quanto tempo você tem para reclamar de um produto com defeito e o que a loja é obrigada a fazer.",
        content: "O Código de Defesa do Consumidor garante prazos para reclamar de vícios em produtos: 30 dias para bens não duráveis e 90 dias para bens duráveis, contados da entrega ou, no caso de vício oculto, do momento em que o defeito aparece.\n\n\
Depois da reclamação, o fornecedor tem até 30 dias para sanar o problema. Se não resolver, o consumidor pode escolher entre a substituição do produto, a devolução do valor pago com correção ou o abatimento proporcional do preço.\n\n\
Guarde a nota fiscal, registre a reclamação por escrito e anote os protocolos de atendimento. Esses documentos são essenciais caso seja necessário recorrer ao Procon ou ao Juizado Especial Cível.",
        image_url: Some("/images/artigos/produto-defeito.jpg"),
        publish_date: "2024-03-12T10:00:00Z",
        category_slug: "direito-consumidor",
        featured: true,
    },
    ArticleSeed {
        title: "Cobrança indevida: quando cabe devolução em dobro",
        slug: "cobranca-indevida-devolucao-em-dobro",
        excerpt: "Pagou uma conta que não devia? Saiba quando o consumidor tem direito a receber o valor em dobro.",
        content: "Quando o consumidor é cobrado por quantia indevida e efetivamente paga, o artigo 42 do CDC garante a repetição do indébito: a devolução em dobro do valor pago em excesso, com correção monetária e juros.\n\n\
A devolução em dobro não se aplica quando o fornecedor demonstra engano justificável. Cobranças recorrentes de tarifas não contratadas, porém, raramente se enquadram nessa exceção.\n\n\
Antes de buscar o Judiciário, vale formalizar a contestação junto à empresa e guardar comprovantes de pagamento e faturas.",
        image_url: None,
        publish_date: "2024-01-22T09:30:00Z",
        category_slug: "direito-consumidor",
        featured: false,
    },
    ArticleSeed {
        title: "Verbas rescisórias: o que você recebe ao ser demitido",
        slug: "verbas-rescisorias-demissao-sem-justa-causa",
        excerpt: "Saldo de salário, aviso prévio, férias e FGTS: veja o que compõe a rescisão sem justa causa.",
        content: "Na demissão sem justa causa, o trabalhador tem direito ao saldo de salário, aviso prévio trabalhado ou indenizado, décimo terceiro proporcional, férias vencidas e proporcionais acrescidas de um terço, saque do FGTS e multa de 40% sobre o saldo do fundo.\n\n\
O pagamento deve ocorrer em até 10 dias após o término do contrato. O atraso gera multa equivalente a um salário do empregado.\n\n\
Confira o termo de rescisão com atenção e, havendo dúvida sobre os cálculos, procure orientação antes de assinar.",
        image_url: Some("/images/artigos/verbas-rescisorias.jpg"),
        publish_date: "2024-04-02T14:00:00Z",
        category_slug: "direito-trabalhista",
        featured: true,
    },
    ArticleSeed {
        title: "Horas extras: como calcular e quando cobrar",
        slug: "horas-extras-como-calcular",
        excerpt: "A jornada passou do limite? Veja como funciona o adicional de horas extras e o banco de horas.",
        content: "A jornada padrão é de 8 horas diárias e 44 semanais. O tempo excedente deve ser pago com adicional mínimo de 50% sobre o valor da hora normal, ou 100% em domingos e feriados não compensados.\n\n\
O banco de horas permite compensar o excesso com folgas, desde que previsto em acordo individual escrito ou em norma coletiva, respeitando os prazos de compensação.\n\n\
Registros de ponto, mensagens e e-mails enviados fora do expediente podem servir como prova em uma reclamação trabalhista.",
        image_url: None,
        publish_date: "2023-11-18T08:00:00Z",
        category_slug: "direito-trabalhista",
        featured: false,
    },
    ArticleSeed {
        title: "Pensão alimentícia: como é definido o valor",
        slug: "pensao-alimenticia-como-e-definido-o-valor",
        excerpt: "O valor da pensão depende da necessidade de quem recebe e da possibilidade de quem paga.",
        content: "Não existe um percentual fixo em lei para a pensão alimentícia. O juiz aplica o binômio necessidade-possibilidade: avalia as despesas de quem recebe e a capacidade financeira de quem paga.\n\n\
Despesas com escola, saúde, moradia e até o aluguel da residência do filho entram no cálculo das necessidades. A pensão pode ser revista sempre que houver mudança relevante na situação de uma das partes.\n\n\
O não pagamento pode levar à prisão civil do devedor, além da penhora de bens e do desconto direto em folha.",
        image_url: Some("/images/artigos/pensao.jpg"),
        publish_date: "2024-02-27T11:15:00Z",
        category_slug: "direito-familia",
        featured: true,
    },
    ArticleSeed {
        title: "Divórcio em cartório: requisitos e passo a passo",
        slug: "divorcio-em-cartorio-requisitos",
        excerpt: "Quando não há filhos menores e existe acordo, o divórcio pode ser feito direto no cartório.",
        content: "O divórcio extrajudicial é feito por escritura pública em cartório de notas. É possível quando o casal está de acordo e não há filhos menores ou incapazes, ou quando as questões relativas aos filhos já foram resolvidas judicialmente.\n\n\
A presença de advogado é obrigatória. Na escritura constam a partilha de bens, eventual pensão entre os cônjuges e a retomada do nome de solteiro.\n\n\
O procedimento costuma ser concluído em poucos dias, com custo menor que o de uma ação judicial.",
        image_url: None,
        publish_date: "2023-09-05T16:45:00Z",
        category_slug: "direito-familia",
        featured: false,
    },
    ArticleSeed {
        title: "Reajuste do aluguel: índices e limites",
        slug: "reajuste-do-aluguel-indices-e-limites",
        excerpt: "Saiba como funciona o reajuste anual do aluguel e o que fazer quando o índice dispara.",
        content: "O contrato de locação deve prever o índice de reajuste, normalmente o IGP-M ou o IPCA, aplicado a cada 12 meses. Sem previsão contratual, o locador não pode impor um índice por conta própria.\n\n\
Quando o índice contratado sobe muito acima da inflação, locador e inquilino podem negociar a troca do indicador. Após três anos de contrato, qualquer das partes pode pedir a revisão judicial do aluguel para adequá-lo ao valor de mercado.\n\n\
Formalize qualquer acordo por escrito, com aditivo assinado por ambas as partes.",
        image_url: Some("/images/artigos/reajuste-aluguel.jpg"),
        publish_date: "2024-04-10T09:00:00Z",
        category_slug: "direito-imobiliario",
        featured: true,
    },
    ArticleSeed {
        title: "Ação de despejo por falta de pagamento",
        slug: "acao-de-despejo-falta-de-pagamento",
        excerpt: "Entenda os prazos da ação de despejo e como o inquilino pode evitar a desocupação.",
        content: "Com o atraso no pagamento, o locador pode ajuizar ação de despejo cumulada com cobrança dos valores devidos. Em contratos sem garantia, a lei permite liminar para desocupação em 15 dias.\n\n\
O inquilino pode evitar o despejo purgando a mora: depositando em juízo, no prazo da contestação, os aluguéis vencidos, multas, juros, custas e honorários. Esse benefício só pode ser usado uma vez a cada 24 meses.\n\n\
Negociar antes da ação costuma ser mais barato para as duas partes.",
        image_url: None,
        publish_date: "2024-01-08T13:20:00Z",
        category_slug: "direito-imobiliario",
        featured: false,
    },
    ArticleSeed {
        title: "Aposentadoria por idade após a reforma",
        slug: "aposentadoria-por-idade-apos-a-reforma",
        excerpt: "Idade mínima, tempo de contribuição e regras de transição para quem já contribuía antes de 2019.",
        content: "Desde a Emenda Constitucional 103/2019, a aposentadoria por idade exige 62 anos para mulheres e 65 anos para homens, com tempo mínimo de contribuição de 15 anos para mulheres e de 20 anos para homens que ingressaram no sistema após a reforma.\n\n\
Quem já contribuía antes da reforma pode se enquadrar em regras de transição, com idade e tempo de contribuição reduzidos.\n\n\
Antes de pedir o benefício, confira o extrato do CNIS: vínculos ausentes ou salários errados reduzem o valor da aposentadoria.",
        image_url: Some("/images/artigos/aposentadoria.jpg"),
        publish_date: "2024-03-28T10:30:00Z",
        category_slug: "direito-previdenciario",
        featured: false,
    },
    ArticleSeed {
        title: "Auxílio por incapacidade temporária: quem tem direito",
        slug: "auxilio-incapacidade-temporaria",
        excerpt: "O antigo auxílio-doença protege o segurado que fica temporariamente impedido de trabalhar.",
        content: "O benefício é devido ao segurado do INSS que fica incapaz para o trabalho por mais de 15 dias consecutivos, desde que cumprida a carência de 12 contribuições, dispensada em casos de acidente e de doenças graves listadas em lei.\n\n\
A incapacidade é comprovada por perícia médica. Leve laudos, exames e receitas atualizados.\n\n\
Se o benefício for negado ou cessado antes da recuperação, é possível recorrer administrativamente ou ingressar com ação judicial.",
        image_url: None,
        publish_date: "2023-12-14T15:00:00Z",
        category_slug: "direito-previdenciario",
        featured: false,
    },
    ArticleSeed {
        title: "Danos morais: quando é possível pedir indenização",
        slug: "danos-morais-quando-pedir-indenizacao",
        excerpt: "Nem todo aborrecimento gera indenização. Veja o que os tribunais consideram dano moral.",
        content: "O dano moral se caracteriza pela ofensa a direitos da personalidade, como honra, imagem e dignidade. Situações como inscrição indevida em cadastro de inadimplentes, extravio de bagagem e exposição vexatória costumam ser reconhecidas.\n\n\
Meros aborrecimentos do dia a dia, em regra, não geram indenização. O valor é fixado pelo juiz conforme a gravidade do fato e a capacidade econômica das partes.\n\n\
Reúna provas como prints, testemunhas e protocolos de atendimento antes de ajuizar a ação.",
        image_url: Some("/images/artigos/danos-morais.jpg"),
        publish_date: "2024-02-05T12:00:00Z",
        category_slug: "direito-civil",
        featured: true,
    },
    ArticleSeed {
        title: "Fiador: responsabilidades e como se exonerar",
        slug: "fiador-responsabilidades-e-exoneracao",
        excerpt: "Quem assina como fiador responde pelo aluguel e encargos do inquilino. Saiba como sair da fiança.",
        content: "O fiador garante o pagamento das obrigações do locatário, inclusive aluguel, condomínio e multas, e pode ter seus bens penhorados, até mesmo o único imóvel residencial.\n\n\
Em contratos por prazo indeterminado, o fiador pode se exonerar notificando o locador, permanecendo responsável por 120 dias após a notificação.\n\n\
Antes de aceitar ser fiador, leia o contrato e verifique se há renúncia ao benefício de ordem.",
        image_url: None,
        publish_date: "2023-10-21T09:45:00Z",
        category_slug: "direito-civil",
        featured: false,
    },
];

// ============================================================================
// Solutions
// ============================================================================

const SOLUTIONS: &[SolutionSeed] = &[
    SolutionSeed {
        title: "Consulta Jurídica Online",
        description: "Converse com um advogado especialista por vídeo e tire suas dúvidas sem sair de casa.",
        image_url: Some("/images/solucoes/consulta-online.jpg"),
        link: "/solucoes/consulta-online",
        link_text: "Agendar consulta",
    },
    SolutionSeed {
        title: "Revisão de Contratos",
        description: "Análise de contratos de locação, prestação de serviços e compra e venda antes de você assinar.",
        image_url: Some("/images/solucoes/revisao-contratos.jpg"),
        link: "/solucoes/revisao-de-contratos",
        link_text: "Enviar contrato",
    },
    SolutionSeed {
        title: "Cálculo Trabalhista",
        description: "Confira se sua rescisão, horas extras e FGTS foram pagos corretamente.",
        image_url: None,
        link: "/solucoes/calculo-trabalhista",
        link_text: "Calcular agora",
    },
    SolutionSeed {
        title: "Planejamento Previdenciário",
        description: "Descubra a melhor regra de aposentadoria para o seu caso e evite perder dinheiro.",
        image_url: Some("/images/solucoes/planejamento-previdenciario.jpg"),
        link: "/solucoes/planejamento-previdenciario",
        link_text: "Saiba mais",
    },
];
